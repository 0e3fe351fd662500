/*!
# `DATA <element>[,<element>...]`

## Purpose
Holds values for `READ`.

## Remarks
The rest of the line belongs to `DATA`, so it must be the last statement
on a line. Elements are numbers, quoted strings, or bare text which
is read as a string with the surrounding spaces removed. All `DATA` lines
of a program form one list in line number order.

## Example
```text
10 DATA 1, 2.5, "HELLO", WORLD
```

*/
