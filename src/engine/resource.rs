//! Per-session resource handles.
//!
//! Audio players, animation loops and the like are owned by the engine that
//! mounted them rather than living in module-level statics. They are
//! released when the session restarts or the engine is torn down.

/// A handle acquired for the running session.
pub trait SessionResource {
    /// Short name for logs.
    fn name(&self) -> &str {
        "resource"
    }

    /// Stop and free the underlying resource. Called exactly once.
    fn release(&mut self);
}

#[derive(Default)]
pub(crate) struct ResourceSet {
    held: Vec<Box<dyn SessionResource>>,
}

impl ResourceSet {
    pub(crate) fn attach(&mut self, resource: Box<dyn SessionResource>) {
        log::debug!("attached {}", resource.name());
        self.held.push(resource);
    }

    pub(crate) fn len(&self) -> usize {
        self.held.len()
    }

    /// Release in reverse acquisition order.
    pub(crate) fn release_all(&mut self) {
        while let Some(mut resource) = self.held.pop() {
            log::debug!("releasing {}", resource.name());
            resource.release();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    struct Named {
        name: &'static str,
        log: Arc<Mutex<Vec<&'static str>>>,
    }

    impl SessionResource for Named {
        fn name(&self) -> &str {
            self.name
        }

        fn release(&mut self) {
            self.log.lock().unwrap().push(self.name);
        }
    }

    #[test]
    fn test_release_all_reverse_order_once() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let mut set = ResourceSet::default();

        for name in ["music", "sfx"] {
            set.attach(Box::new(Named {
                name,
                log: Arc::clone(&log),
            }));
        }
        assert_eq!(set.len(), 2);

        set.release_all();
        set.release_all();

        assert_eq!(*log.lock().unwrap(), vec!["sfx", "music"]);
        assert_eq!(set.len(), 0);
    }
}
