/*!
# `ON <expression> GOTO|GOSUB <line>[,<line>...]`

## Purpose
Branches to a line based on the value of expression.

## Remarks
The value is truncated. 1 goes to the first line, 2 the second, and
so on. 0 or a value beyond the list does not branch.
A negative value is an `ILLEGAL FUNCTION CALL` error.

## Example
```text
10 INPUT "1, 2 OR 3";A
20 ON A GOTO 100,200,300
30 PRINT "NOT A CHOICE":GOTO 10
```

*/
