/*!
# Introductory Tutorial for TRS-80 Level I BASIC

Run the executable from a terminal. When you see the following, BASIC is
waiting for you. Type `EXIT` or CTRL-D to leave.
<pre><code>&nbsp;  READY
&nbsp;> █
</code></pre>

Stop a running program with CTRL-C.

Level I BASIC came in the ROM of the 1977 TRS-80 Model I. It has
numbers, strings, one-dimensional arrays and a handful of statements,
and fits in 4K. Everything it can do is in this manual.

When you see `READY`, BASIC will accept a statement. Lines you type are
marked with a "`>`".

<pre><code>&nbsp;> PRINT "HELLO WORLD"
&nbsp;  HELLO WORLD
&nbsp;  READY
</code></pre>

A statement that runs right away is in direct mode. Put a line number
from 0 to 32767 in front of a statement and it is saved in the program
instead.

<pre><code>&nbsp;> 10 PRINT "HELLO WORLD"
&nbsp;> 20 GOTO 10
&nbsp;> LIST
&nbsp;  10 PRINT "HELLO WORLD"
&nbsp;  20 GOTO 10
&nbsp;  READY
&nbsp;> RUN
&nbsp;  HELLO WORLD
&nbsp;  HELLO WORLD
&nbsp;  BREAK AT 10
&nbsp;  READY
</code></pre>

Typing a line with a number that already exists replaces it. Typing only
the number deletes it. Several statements can share a line when separated
by colons.

Keywords may be abbreviated with a period, the way the original
manual taught: `P.` is `PRINT`, `G.` is `GOTO`, `IN.` is `INPUT`, and
`N.` is `NEXT`. Spaces between keywords are optional, so `FORI=1TO9`
works too.

Programs are plain text files. `SAVE "GAME.BAS"` writes one and
`LOAD "GAME.BAS"` reads it back. Start the executable with a file name to
load and run it immediately.

*/
