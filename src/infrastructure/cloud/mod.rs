pub mod meater;
