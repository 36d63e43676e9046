mod suggest;

pub use suggest::suggest;
