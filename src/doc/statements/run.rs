/*!
# `RUN [<line number>]`

## Purpose
Clear variables and start the program.

## Remarks
Omitting the line number starts at the first line.

## Example
```text
10 PRINT "HELLO WORLD"
RUN
HELLO WORLD
```

*/
