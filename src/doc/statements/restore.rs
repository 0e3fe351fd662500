/*!
# `RESTORE`

## Purpose
Start reading `DATA` from the beginning again.

## Example
```text
10 FOR I=1 TO 5
20 READ A$:PRINT A$;:RESTORE
30 NEXT
100 DATA "HELLO"
RUN
HELLOHELLOHELLOHELLOHELLO
```

*/
