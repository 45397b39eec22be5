/*!
# Functions
*/

pub mod ABS {
    /*!
    ## `ABS(X)` Returns the absolute value of X.
    ```text
    PRINT ABS(-12)
    12
    ```
    */
}

pub mod ADC {
    /*!
    ## `ADC(X)` Returns the reading of analog channel X.
    An unknown channel is a `Parameter error`.
    */
}

pub mod CHR {
    /*!
    ## `CHR(X)` Prints the character with code X.
    Only valid as a `PRINT` item.
    ```text
    PRINT CHR(72);CHR(73)
    HI
    ```
    */
}

pub mod INKEY {
    /*!
    ## `INKEY` or `INKEY(MS)` Returns the code of a key typed at the console.
    Returns -1 when no key is waiting. With MS it waits up to that many
    milliseconds for a key.
    ```text
    K=INKEY(5000):IF K>=0 THEN PRINT CHR(K)
    ```
    */
}

pub mod INP {
    /*!
    ## `INP(X)` Returns the level of digital pin X, 0 or 1.
    An unknown pin is a `Parameter error`.
    */
}

pub mod RND {
    /*!
    ## `RND(X)` Returns a random number from 0 to X-1.
    Returns 0 when X is not positive.
    ```text
    PRINT RND(6)+1
    4
    ```
    */
}

pub mod TICK {
    /*!
    ## `TICK` Returns the milliseconds since power-on.
    The count wraps to fit the integer size.
    */
}
