/*!
# `FOR <variable>=x TO y [STEP z]`
Where x, y, and z are expressions.

## Purpose
Used with `NEXT` to repeat statements while counting through a sequence
of numbers.

## Remarks
x, y and z are evaluated once, in that order, before x is assigned.
`STEP` defaults to 1. The body always runs at least once.
Starting a `FOR` on a variable that already has a loop open throws away
that loop and every loop inside it. At most 64 loops can be open.

## Example 1
```text
10 I=9
20 FOR I=1 TO 10 STEP I
30 PRINT "HELLO WORLD";I
40 NEXT I
RUN
HELLO WORLD 1
HELLO WORLD 10
```

## Example 2
```text
10 FOR X=1 TO 2
20 FOR Y=5 TO 6
30 PRINT X;Y
40 NEXT Y
50 NEXT X
RUN
 1 5
 1 6
 2 5
 2 6
```

*/
