/*!
# `SAVE "<filename>"`
Also `CSAVE`.

## Purpose
Write the program to a file as plain text.

## Example
```text
SAVE "MYPROG.BAS"
```

*/
