/*!
# `DELETE <line number>`

## Purpose
Remove one line from the program.

## Remarks
Typing the line number by itself does the same. Deleting a line that
does not exist does nothing.

## Example
```text
10 PRINT 1
20 PRINT 2
DELETE 10
LIST
20 PRINT 2
```

*/
