#[path = "helpers/mod.rs"]
mod helpers;

#[path = "ide/mod.rs"]
mod ide;

#[path = "semantic/mod.rs"]
mod semantic;
