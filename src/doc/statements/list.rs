/*!
# `LIST [<line number>]`

## Purpose
Show the program currently in memory.

## Remarks
Listing starts at the given line, or the first one. After twelve lines
it waits for a key; ESC ends the listing.

## Example
```text
LIST
LIST 120
```

*/
