/*!
# Limits and Internals

NanoBASIC never builds a syntax tree. Each line is encoded once, when it
is typed, into a compact bytecode and that bytecode is what runs.
Keywords become single bytes from `0x80` up. Numbers become a tag byte
followed by one to four little-endian bytes, except single decimal
digits which stay as their ASCII character. Everything else, variable
letters, operators, strings and comments, is kept as typed. Spaces are
dropped except around words like `THEN` and `TO` where `LIST` puts them
back.

The program area holds the stored lines back to back, each ending with
a zero byte, with one more zero marking the end. The line being typed at
the prompt is encoded right after it so a `GOTO` from the prompt lands
in the same memory.

The interpreter walks the bytecode with a cursor. Block structure is
found by scanning forward for the matching word, counting nested blocks
on the way. Loops and subroutines leave a frame on a small stack that
remembers where to go back to.

Default sizes on the desktop.

| Area | Size |
|---|---|
| Program | 1016 bytes, the EEPROM less its 8 byte header |
| Typed line | 128 characters |
| Encoded line | 128 bytes |
| Array `@` | 256 elements |
| Stack | 16 frames |
| Expression depth | 32 |

The saved program is an 8 byte header, `NB`, the format version, the
program length and the autorun flag, followed by the program bytes.

*/
