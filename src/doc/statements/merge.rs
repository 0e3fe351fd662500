/*!
# `MERGE "<filename>"`

## Purpose
Add the lines of a file to the program in memory.

## Remarks
Lines in the file replace lines with the same number.
Variables are kept.

## Example
```text
MERGE "SUBROUTINES.BAS"
```

*/
