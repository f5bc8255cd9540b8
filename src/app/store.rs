use tokio::sync::watch;

/// The selected ticker. The dashboard is the only writer; the refresh task subscribes.
#[derive(Debug)]
pub struct SymbolStore {
    sender: watch::Sender<String>,
}

impl SymbolStore {
    pub fn new(initial: &str) -> Self {
        let (sender, _) = watch::channel(initial.to_string());
        Self { sender }
    }

    pub fn current(&self) -> String {
        self.sender.borrow().clone()
    }

    pub fn is_current(&self, symbol: &str) -> bool {
        *self.sender.borrow() == symbol
    }

    /// Returns false when `symbol` was already selected.
    pub fn set(&self, symbol: &str) -> bool {
        self.sender.send_if_modified(|current| {
            if current == symbol {
                return false;
            }
            *current = symbol.to_string();
            true
        })
    }

    pub fn subscribe(&self) -> watch::Receiver<String> {
        self.sender.subscribe()
    }
}
