/*!
# Introductory Tutorial for NanoBASIC

Start the `nanobasic` executable from a terminal. The banner is
followed by `OK`, which means the interpreter is waiting for you.
Stop a running program with CTRL-C.

```text
NanoBASIC RS Ver 0.14.0
OK
```

Anything typed without a label runs immediately.

```text
PRINT 6*7
42
OK
```

## Entering a program

NanoBASIC programs are a list of lines. Lines are counted from the top
of the program starting at 1 and a line may begin with a number which
becomes its label. Labels are what `GOTO` and `GOSUB` look for; they
do not have to be in order and most lines don't need one.

`PROG` erases the current program and starts entry mode. Each line you
type is appended to the program. A line starting with `#` ends entry.

```text
PROG
>FOR I=1 TO 3
>PRINT I
>NEXT I
>#
OK
RUN
1
2
3
OK
```

A labelled line typed at the `OK` prompt is stored in the program:
it replaces the line with the same label or is added at the end.
A label by itself deletes that line.

```text
10 PRINT "HELLO"
20 GOTO 10
10
LIST
20 GOTO 10
```

`LIST` finishes with the size of the stored program in bytes.

## Keeping a program

`SAVE` writes the program to the EEPROM. `SAVE 1` also marks it to run
automatically at power-on after a short countdown which any key cancels.
`LOAD` brings the saved program back.

```text
SAVE 1
OK
RESET
```

## Interrupting

CTRL-C stops a program with `Break in N` where N is the line that was
running. `RESUME` picks up at the statement that was interrupted, or
after the `STOP` that ended the program.

*/
