use std::sync::Arc;
use uuid::Uuid;

pub type Callback<T> = Arc<dyn Fn(Uuid, Arc<T>) + Send + Sync>;

#[derive(Clone)]
pub struct Listener<T> {
    callback: Callback<T>,
    id: Option<Uuid>,
}

impl<T> Listener<T>
where
    T: Send + Sync + 'static,
{
    pub fn new<F>(callback: F) -> Self
    where
        F: Fn(Uuid, Arc<T>) + Send + Sync + 'static,
    {
        Listener {
            callback: Arc::new(callback),
            id: None,
        }
    }

    pub fn get_callback(&self) -> Callback<T> {
        self.callback.clone()
    }

    /// Id assigned when the listener was registered with a publisher
    pub fn get_id(&self) -> Option<Uuid> {
        self.id
    }

    pub fn set_id(&mut self, id: Uuid) {
        self.id = Some(id);
    }
}
