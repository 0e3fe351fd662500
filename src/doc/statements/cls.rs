/*!
# `CLS`

## Purpose
Clear the screen and put the cursor at the top left.

## Example
```text
10 CLS
20 PRINT "TOP OF THE SCREEN"
```

*/
