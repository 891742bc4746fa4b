pub mod pasta;
