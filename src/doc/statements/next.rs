/*!
# `NEXT [<variable>]`
Also see `FOR`

## Purpose
Marks the end of a `FOR` loop.

## Remarks
Without a variable the innermost loop is used. With one, loops opened
inside it are closed first. `NEXT WITHOUT FOR` is reported when no loop
matches.

## Example
```text
FOR I=1 TO 10:NEXT
FOR J=1 TO 20:FOR I=1 TO 20:NEXT J
```

*/
