use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use log::{debug, warn};
use thiserror::Error;
use wasm_bindgen::JsCast;
use web_sys::{window, Document, HtmlScriptElement};

const EMBED_ATTRIBUTE: &str = "data-embed-src";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum EmbedError {
    #[error("no document available")]
    NoDocument,
    #[error("document has no <head>")]
    NoHead,
    #[error("dom operation failed: {0}")]
    Dom(String),
}

/// Where shared third-party scripts get attached to and removed from.
pub trait ScriptHost {
    fn attach(&self, src: &str) -> Result<(), EmbedError>;
    fn detach(&self, src: &str);
}

/// Reference counts script sources so a script shared by several mounted widgets is
/// attached on the first acquisition and removed only after the last lease is dropped.
pub struct ScriptRegistry<H: ScriptHost> {
    host: H,
    leases: RefCell<HashMap<String, usize>>,
}

impl<H: ScriptHost> ScriptRegistry<H> {
    pub fn new(host: H) -> Rc<Self> {
        Rc::new(Self {
            host,
            leases: RefCell::new(HashMap::new()),
        })
    }

    pub fn acquire(self: &Rc<Self>, src: &str) -> ScriptLease<H> {
        let mut leases = self.leases.borrow_mut();
        if let Some(count) = leases.get_mut(src) {
            *count += 1;
            debug!("Script {} now has {} leases", src, count);
            return ScriptLease::held(self, src);
        }

        match self.host.attach(src) {
            Ok(()) => {
                debug!("Attached script {}", src);
                leases.insert(src.to_string(), 1);
                ScriptLease::held(self, src)
            }
            Err(err) => {
                warn!("Could not attach script {}: {}", src, err);
                ScriptLease { registry: None, src: src.to_string() }
            }
        }
    }

    #[cfg(test)]
    pub fn lease_count(&self, src: &str) -> usize {
        self.leases.borrow().get(src).copied().unwrap_or(0)
    }

    fn release(&self, src: &str) {
        let mut leases = self.leases.borrow_mut();
        let remaining = match leases.get_mut(src) {
            Some(count) => {
                *count -= 1;
                *count
            }
            None => return,
        };

        if remaining == 0 {
            leases.remove(src);
            drop(leases);
            debug!("Detaching script {}", src);
            self.host.detach(src);
        }
    }
}

/// One acquisition of a shared script. Released on drop.
#[must_use = "the script is released as soon as the lease is dropped"]
pub struct ScriptLease<H: ScriptHost> {
    registry: Option<Rc<ScriptRegistry<H>>>,
    src: String,
}

impl<H: ScriptHost> ScriptLease<H> {
    fn held(registry: &Rc<ScriptRegistry<H>>, src: &str) -> Self {
        Self {
            registry: Some(registry.clone()),
            src: src.to_string(),
        }
    }

    /// False when the script could not be attached; the lease then owns nothing.
    pub fn is_held(&self) -> bool {
        self.registry.is_some()
    }
}

impl<H: ScriptHost> Drop for ScriptLease<H> {
    fn drop(&mut self) {
        if let Some(registry) = self.registry.take() {
            registry.release(&self.src);
        }
    }
}

/// Attaches `<script async>` tags to the document head.
pub struct DocumentScripts;

impl DocumentScripts {
    fn document() -> Result<Document, EmbedError> {
        window()
            .and_then(|window| window.document())
            .ok_or(EmbedError::NoDocument)
    }
}

impl ScriptHost for DocumentScripts {
    fn attach(&self, src: &str) -> Result<(), EmbedError> {
        let document = Self::document()?;
        let head = document.head().ok_or(EmbedError::NoHead)?;
        let script = document
            .create_element("script")
            .map_err(|err| EmbedError::Dom(format!("{:?}", err)))?
            .dyn_into::<HtmlScriptElement>()
            .map_err(|_| EmbedError::Dom("created element is not a script".to_string()))?;

        script.set_src(src);
        script.set_async(true);
        script
            .set_attribute(EMBED_ATTRIBUTE, src)
            .map_err(|err| EmbedError::Dom(format!("{:?}", err)))?;
        head.append_child(&script)
            .map_err(|err| EmbedError::Dom(format!("{:?}", err)))?;
        Ok(())
    }

    fn detach(&self, src: &str) {
        let Ok(document) = Self::document() else {
            return;
        };
        let selector = format!("script[{}=\"{}\"]", EMBED_ATTRIBUTE, src);
        match document.query_selector(&selector) {
            Ok(Some(script)) => script.remove(),
            Ok(None) => debug!("Script {} already gone", src),
            Err(err) => warn!("Could not look up script {}: {:?}", src, err),
        }
    }
}

thread_local! {
    static DOCUMENT_SCRIPTS: Rc<ScriptRegistry<DocumentScripts>> = ScriptRegistry::new(DocumentScripts);
}

/// Acquires `src` from the page-wide registry.
pub fn acquire_script(src: &str) -> ScriptLease<DocumentScripts> {
    DOCUMENT_SCRIPTS.with(|registry| registry.acquire(src))
}

#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    use pretty_assertions::assert_eq;

    use super::*;

    const WIDGET: &str = "https://assets.calendly.com/assets/external/widget.js";

    #[derive(Default)]
    struct RecordingHost {
        calls: RefCell<Vec<String>>,
        fail_next: Cell<bool>,
    }

    impl ScriptHost for Rc<RecordingHost> {
        fn attach(&self, src: &str) -> Result<(), EmbedError> {
            if self.fail_next.replace(false) {
                return Err(EmbedError::NoHead);
            }
            self.calls.borrow_mut().push(format!("attach {}", src));
            Ok(())
        }

        fn detach(&self, src: &str) {
            self.calls.borrow_mut().push(format!("detach {}", src));
        }
    }

    fn registry() -> (Rc<RecordingHost>, Rc<ScriptRegistry<Rc<RecordingHost>>>) {
        let host = Rc::new(RecordingHost::default());
        (host.clone(), ScriptRegistry::new(host))
    }

    #[test]
    fn single_mount_attaches_and_detaches() {
        let (host, registry) = registry();
        let lease = registry.acquire(WIDGET);
        assert!(lease.is_held());
        assert_eq!(registry.lease_count(WIDGET), 1);

        drop(lease);
        assert_eq!(registry.lease_count(WIDGET), 0);
        assert_eq!(
            *host.calls.borrow(),
            vec![format!("attach {}", WIDGET), format!("detach {}", WIDGET)]
        );
    }

    #[test]
    fn overlapping_mounts_share_one_script() {
        let (host, registry) = registry();
        let first = registry.acquire(WIDGET);
        let second = registry.acquire(WIDGET);
        assert_eq!(registry.lease_count(WIDGET), 2);

        drop(first);
        assert_eq!(*host.calls.borrow(), vec![format!("attach {}", WIDGET)]);

        let third = registry.acquire(WIDGET);
        drop(second);
        drop(third);
        assert_eq!(
            *host.calls.borrow(),
            vec![format!("attach {}", WIDGET), format!("detach {}", WIDGET)]
        );
    }

    #[test]
    fn failed_attach_gives_inert_lease_and_retries_later() {
        let (host, registry) = registry();
        host.fail_next.set(true);

        let failed = registry.acquire(WIDGET);
        assert!(!failed.is_held());
        assert_eq!(registry.lease_count(WIDGET), 0);
        drop(failed);
        assert!(host.calls.borrow().is_empty());

        let retried = registry.acquire(WIDGET);
        assert!(retried.is_held());
        assert_eq!(*host.calls.borrow(), vec![format!("attach {}", WIDGET)]);
    }

    #[test]
    fn sources_are_counted_separately() {
        let (host, registry) = registry();
        let widget = registry.acquire(WIDGET);
        let other = registry.acquire("https://example.com/other.js");
        drop(other);

        assert_eq!(registry.lease_count(WIDGET), 1);
        assert_eq!(
            *host.calls.borrow(),
            vec![
                format!("attach {}", WIDGET),
                "attach https://example.com/other.js".to_string(),
                "detach https://example.com/other.js".to_string(),
            ]
        );
        drop(widget);
    }

    #[test]
    fn error_messages() {
        assert_eq!(EmbedError::NoHead.to_string(), "document has no <head>");
        assert_eq!(
            EmbedError::Dom("boom".to_string()).to_string(),
            "dom operation failed: boom"
        );
    }
}
