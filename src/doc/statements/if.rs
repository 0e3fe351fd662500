/*!
# `IF <expression> [THEN] <statements>`
Also `IF <expression> THEN <line number>`.

## Purpose
Do something contingent on a predicate.

## Remarks
Any number other than zero is true. When false, the rest of the line is
skipped. `THEN` followed by a line number is a `GOTO`.
Relational operators give 1 for true and 0 for false, so `*` and `+`
work as AND and OR.

## Example
```text
10 A=10
20 IF A<30 THEN PRINT A:A=A+10:GOTO 20
RUN
 10
 20
```

*/
