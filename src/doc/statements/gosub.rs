/*!
# `GOSUB <line number>`

## Purpose
Remember where we are and move execution to the specified line number.

## Remarks
`RETURN` continues with the statement after the `GOSUB`.
Subroutines nest 128 deep.

## Example
```text
10 GOSUB 100
20 PRINT "WORLD"
90 END
100 PRINT "HELLO ";
110 RETURN
RUN
HELLO WORLD
```

*/
