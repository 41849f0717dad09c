//! Disable-while-working guard for submit buttons.
//!
//! A request handler takes a `BusyGuard` before its first await; dropping it
//! (on success, on a rejected bet, on a network failure, or on an early `?`
//! return) re-enables the button and restores its label exactly once.

pub struct BusyGuard {
    release: Option<Box<dyn FnOnce()>>,
}

impl BusyGuard {
    pub fn engage(engage: impl FnOnce(), release: impl FnOnce() + 'static) -> Self {
        engage();
        Self { release: Some(Box::new(release)) }
    }
}

impl Drop for BusyGuard {
    fn drop(&mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }
}

/// Label a submit button shows for its current state.
pub fn button_label<'a>(busy: bool, idle: &'a str, working: &'a str) -> &'a str {
    if busy { working } else { idle }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    fn tracked() -> (Rc<Cell<bool>>, Rc<Cell<u32>>) {
        (Rc::new(Cell::new(false)), Rc::new(Cell::new(0)))
    }

    #[test]
    fn drop_restores_once() {
        let (busy, releases) = tracked();
        {
            let b = busy.clone();
            let (b2, r) = (busy.clone(), releases.clone());
            let _guard = BusyGuard::engage(move || b.set(true), move || {
                b2.set(false);
                r.set(r.get() + 1);
            });
            assert!(busy.get());
        }
        assert!(!busy.get());
        assert_eq!(releases.get(), 1);
    }

    #[test]
    fn early_error_return_still_restores() {
        let (busy, releases) = tracked();
        let run = |fail: bool| -> Result<(), String> {
            let b = busy.clone();
            let (b2, r) = (busy.clone(), releases.clone());
            let _guard = BusyGuard::engage(move || b.set(true), move || {
                b2.set(false);
                r.set(r.get() + 1);
            });
            if fail {
                return Err("Ошибка: X".into());
            }
            Ok(())
        };
        assert!(run(true).is_err());
        assert!(!busy.get());
        assert!(run(false).is_ok());
        assert_eq!(releases.get(), 2);
    }

    #[test]
    fn label_switches_with_state() {
        assert_eq!(button_label(false, "Сделать ставку", "Размещение..."), "Сделать ставку");
        assert_eq!(button_label(true, "Сделать ставку", "Размещение..."), "Размещение...");
    }
}
