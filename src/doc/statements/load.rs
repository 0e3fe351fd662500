/*!
# `LOAD "<filename>"`
Also `CLOAD`.

## Purpose
Replace the program with one from a file.

## Remarks
The filename may also be an `http://` or `https://` URL.
Every line of the file needs a line number.

## Example
```text
LOAD "http://example.com/program.bas"
READY
RUN
```

*/
