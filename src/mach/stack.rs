use crate::error;
use crate::lang::Error;

type Result<T> = std::result::Result<T, Error>;

/// ## Stack enforced and size limited vector

pub struct Stack<T> {
    overflow_message: &'static str,
    max_len: usize,
    vec: Vec<T>,
}

impl<T: std::fmt::Debug> std::fmt::Debug for Stack<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self.vec)
    }
}

impl<T> Stack<T> {
    pub fn new(overflow_message: &'static str, max_len: usize) -> Stack<T> {
        Stack {
            overflow_message,
            max_len,
            vec: vec![],
        }
    }
    pub fn clear(&mut self) {
        self.vec.clear()
    }
    pub fn len(&self) -> usize {
        self.vec.len()
    }
    pub fn last(&self) -> Option<&T> {
        self.vec.last()
    }
    /// Drops everything above `len`.
    pub fn truncate(&mut self, len: usize) {
        self.vec.truncate(len)
    }
    /// Index of the topmost entry matching the predicate.
    pub fn rposition<P: FnMut(&T) -> bool>(&self, predicate: P) -> Option<usize> {
        self.vec.iter().rposition(predicate)
    }
    pub fn push(&mut self, val: T) -> Result<()> {
        if self.vec.len() >= self.max_len {
            return Err(error!(OutOfMemory; self.overflow_message));
        }
        self.vec.push(val);
        Ok(())
    }
    pub fn pop(&mut self) -> Option<T> {
        self.vec.pop()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lang::ErrorCode;

    #[test]
    fn test_overflow() {
        let mut s: Stack<u8> = Stack::new("TEST STACK", 2);
        assert!(s.push(1).is_ok());
        assert!(s.push(2).is_ok());
        let e = s.push(3).unwrap_err();
        assert_eq!(e.code(), ErrorCode::OutOfMemory);
        assert_eq!(e.to_string(), "SORRY\nOUT OF MEMORY; TEST STACK");
        assert_eq!(s.rposition(|n| *n == 1), Some(0));
        s.truncate(1);
        assert_eq!(s.pop(), Some(1));
        assert_eq!(s.pop(), None);
    }
}
