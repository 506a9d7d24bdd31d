/// Generates instrumented `get_<entity>` lookups that forward to the inner
/// `ResourceClient` and convert framework errors.
macro_rules! impl_client_methods {
    ($client_name:ident, $entity:ty, $entity_name_snake:ident) => {
        paste::paste! {
            impl $client_name {
                #[tracing::instrument(skip(self))]
                pub async fn [<get_ $entity_name_snake>](&self, id: String) -> Result<Option<$entity>, $crate::error::CheckoutError> {
                    tracing::debug!("Sending request");
                    Ok(self.inner.get(id).await?)
                }
            }
        }
    };
}

macro_rules! impl_client_new {
    ($client_name:ident, $entity:ty) => {
        impl $client_name {
            pub fn new(inner: $crate::actor_framework::ResourceClient<$entity>) -> Self {
                Self { inner }
            }
        }
    };
}

macro_rules! impl_basic_client {
    ($client_name:ident, $entity:ty, $entity_name_snake:ident) => {
        impl_client_new!($client_name, $entity);
        impl_client_methods!($client_name, $entity, $entity_name_snake);
    };
}
