/*!
# `CONT`

## Purpose
Continue a program stopped with `STOP` or BREAK.

## Remarks
Execution resumes with the statement after the `STOP`. A program
interrupted with CTRL-C resumes with the statement that was interrupted.
After an error, `END`, `NEW`, `LOAD`, `RUN`, or any change to the
program there is nothing to continue and `CAN'T CONTINUE` is reported.

## Example
```text
10 PRINT "HELLO"
20 STOP
30 PRINT "WORLD"
RUN
HELLO
BREAK AT 20
CONT
WORLD
```

*/
