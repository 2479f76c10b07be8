/// Observable state of one cached read.
///
/// Mirrors what a list view needs to render: a loading indicator, the last
/// good data, and the last error. A refetch keeps the previous data visible
/// until it settles.
#[derive(Clone, Debug, PartialEq)]
pub struct QueryState<T, E> {
    pub data: Option<T>,
    pub error: Option<E>,
    pub fetching: bool,
}

impl<T, E> Default for QueryState<T, E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, E> QueryState<T, E> {
    /// Initial state: the first fetch is about to start.
    pub fn new() -> Self {
        Self {
            data: None,
            error: None,
            fetching: true,
        }
    }

    pub fn begin_fetch(&mut self) {
        self.fetching = true;
    }

    /// Record the outcome of a fetch.
    pub fn settle(&mut self, result: Result<T, E>) {
        match result {
            Ok(data) => {
                self.data = Some(data);
                self.error = None;
            }
            Err(error) => {
                self.data = None;
                self.error = Some(error);
            }
        }
        self.fetching = false;
    }

    /// True only for the first fetch, before any data arrived.
    pub fn is_loading(&self) -> bool {
        self.fetching && self.data.is_none()
    }

    pub fn error(&self) -> Option<&E> {
        self.error.as_ref()
    }
}

impl<T, E> QueryState<Vec<T>, E> {
    /// The fetched items, or an empty slice while loading or after a failure.
    pub fn items(&self) -> &[T] {
        self.data.as_deref().unwrap_or(&[])
    }
}
