/*!
# Functions
*/

pub mod ABS {
    /*!
    ## `ABS(X)` Returns the absolute value of X.
    ```text
    PRINT ABS(-0.123)
     .123
    ```
    */
}

pub mod INT {
    /*!
    ## `INT(X)` Returns the largest whole number not greater than X.
    ```text
    PRINT INT(2.5), INT(-2.5)
     2              -3
    ```
    */
}

pub mod MEM {
    /*!
    ## `MEM` Returns the bytes of memory left for the program.
    ```text
    PRINT MEM
     15572
    ```
    */
}

pub mod RND {
    /*!
    ## `RND(X)` Returns a random number.
    `RND(0)` is a number from 0 up to but not including 1.
    `RND(N)` is a whole number from 1 to N.
    ```text
    PRINT RND(6)
     4
    ```
    */
}

pub mod TAB {
    /*!
    ## `TAB(X)` Moves the cursor to column X.
    Only valid in `PRINT`.
    ```text
    PRINT "A";TAB(10);"B"
    A         B
    ```
    */
}
