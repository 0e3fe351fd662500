/*!
# `[LET] <variable>=<expression>`

## Purpose
Assign a value to the variable.

## Remarks
The word `LET` is optional. String variables take strings and numeric
variables take numbers; anything else is `TYPE MISMATCH`.

## Example
```text
10 A = 10
20 PRINT A
30 LET A$ = "TEN"
40 PRINT A$
RUN
 10
TEN
```

*/
