/*!
# `REM <anything>`

## Purpose
Embeds non-executing remarks into the program.

## Remarks
Everything after `REM` is part of the remark, including colons.

## Example
```text
10 REM AUTHORED BY ZAPHOD
20 PRINT 42
RUN
 42
```

*/
