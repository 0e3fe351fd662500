/*!
# `PRINT [AT <position>,] [<list of expressions>]`

## Purpose
Output information to the screen.

## Remarks
A `PRINT` by itself outputs a newline.
To suppress the newline, end with a semicolon or comma.
Expressions separated by a semicolon or nothing print with nothing between.
The screen is divided into four zones of 16 characters; a comma advances
to the start of the next zone. `TAB(n)` moves to column n when the cursor
is before it. `AT` places the cursor first, counting the 64 by 16 screen
from 0 at the top left to 1023 at the bottom right.

Numbers print with a space or minus sign in front and up to six
significant digits.

## Example
```text
PRINT "A","B";TAB(40);"C"
A               B                       C
PRINT AT 476,"MIDDLE"
```

*/
