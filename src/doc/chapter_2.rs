/*!
# Statements

Statements are separated by a colon (:). A single quote (') starts a
comment which runs to the end of the line.
*/

#[path = "statements/data.rs"]
#[allow(non_snake_case)]
pub mod DATA;

#[path = "statements/while.rs"]
#[allow(non_snake_case)]
pub mod DO;

#[path = "statements/end.rs"]
#[allow(non_snake_case)]
pub mod END;

#[path = "statements/for.rs"]
#[allow(non_snake_case)]
pub mod FOR;

#[path = "statements/gosub.rs"]
#[allow(non_snake_case)]
pub mod GOSUB;

#[path = "statements/goto.rs"]
#[allow(non_snake_case)]
pub mod GOTO;

#[path = "statements/if.rs"]
#[allow(non_snake_case)]
pub mod IF;

#[path = "statements/input.rs"]
#[allow(non_snake_case)]
pub mod INPUT;

#[path = "statements/list.rs"]
#[allow(non_snake_case)]
pub mod LIST;

#[path = "statements/load.rs"]
#[allow(non_snake_case)]
pub mod LOAD;

#[path = "statements/next.rs"]
#[allow(non_snake_case)]
pub mod NEXT;

#[path = "statements/print.rs"]
#[allow(non_snake_case)]
pub mod PRINT;

#[path = "statements/read.rs"]
#[allow(non_snake_case)]
pub mod READ;

#[path = "statements/restore.rs"]
#[allow(non_snake_case)]
pub mod RESTORE;

#[path = "statements/return.rs"]
#[allow(non_snake_case)]
pub mod RETURN;

#[path = "statements/run.rs"]
#[allow(non_snake_case)]
pub mod RUN;

#[path = "statements/save.rs"]
#[allow(non_snake_case)]
pub mod SAVE;

#[path = "statements/stop.rs"]
#[allow(non_snake_case)]
pub mod STOP;

pub mod DELAY {
    /*!
    # `DELAY <milliseconds>`
    Wait. CTRL-C still stops the program.
    */
}

pub mod EXIT {
    /*!
    # `EXIT`
    Leave the innermost `FOR`, `DO` or `WHILE` loop.
    */
}

pub mod CONTINUE {
    /*!
    # `CONTINUE`
    Skip to the `NEXT` or `LOOP` of the innermost loop.
    */
}

pub mod NEW {
    /*!
    # `NEW`
    Erase the program and clear the variables.
    */
}

pub mod OUTP {
    /*!
    # `OUTP <pin>,<value>`
    Drive a digital output. Zero is low and anything else is high.
    */
}

pub mod PAUSE {
    /*!
    # `PAUSE`
    Wait for a key.
    */
}

pub mod PROG {
    /*!
    # `PROG`
    Erase the program and append the lines that follow to a new one.
    A line starting with `#` ends entry. Only valid at the prompt.
    */
}

pub mod PWM {
    /*!
    # `PWM <pin>,<duty>`
    Start pulse width modulation with a duty from 0 to 255.
    */
}

pub mod RANDOMIZE {
    /*!
    # `RANDOMIZE <seed>`
    Reseed the random number generator so `RND` repeats its sequence.
    */
}

pub mod RESET {
    /*!
    # `RESET`
    Restart the board as if the power had been cycled.
    */
}
