/// A message waiting in the outbox.
#[derive(Debug, Clone, PartialEq)]
pub struct Email {
    pub id: String,
    pub to: String,
    pub subject: String,
    pub body: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EmailCreate {
    pub to: String,
    pub subject: String,
    pub body: String,
}
