/*!
# `STOP`

## Purpose
Stop the program and show where.

## Remarks
`CONT` carries on from the next statement.

## Example
```text
10 PRINT "HELLO"
20 STOP
RUN
HELLO
BREAK AT 20
```

*/
