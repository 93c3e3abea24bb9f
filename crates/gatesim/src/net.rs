use crate::ids::NodeRef;
use crate::value::Value;

/// A one-driver, many-reader signal carrier.
///
/// A net is passive: it never computes anything itself. `tick`/`reset`
/// traversal (see [`crate::engine`]) simply forwards through a net to its
/// readers in insertion order.
#[derive(Debug, Clone)]
pub struct Net {
    id: String,
    current: Value,
    driver: Option<NodeRef>,
    readers: Vec<NodeRef>,
}

impl Net {
    pub(crate) fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            current: Value::X,
            driver: None,
            readers: Vec::new(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn current(&self) -> Value {
        self.current
    }

    pub(crate) fn set_current(&mut self, value: Value) {
        self.current = value;
    }

    pub(crate) fn set_driver(&mut self, driver: NodeRef) {
        self.driver = Some(driver);
    }

    pub fn driver(&self) -> Option<NodeRef> {
        self.driver
    }

    pub(crate) fn add_reader(&mut self, reader: NodeRef) {
        self.readers.push(reader);
    }

    pub fn readers(&self) -> &[NodeRef] {
        &self.readers
    }
}
