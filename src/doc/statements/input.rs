/*!
# `INPUT ["<prompt>";]<variable>[,<variable>...]`

## Purpose
Suspends execution and awaits a response from the keyboard.

## Remarks
The prompt is followed by `? `. Several values may be typed at once,
separated by commas. When more are needed the prompt is `?? `.
Something that isn't a number typed for a numeric variable gets
`WHAT?` and the question is asked again.

## Example
```text
10 INPUT "NAME AND AGE";N$,A
20 PRINT N$;" IS";A
RUN
NAME AND AGE? ZAPHOD
?? 42
ZAPHOD IS 42
```

*/
