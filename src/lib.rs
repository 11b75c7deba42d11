pub mod prelude;
pub mod number_theory{
    pub mod integer_square_root;
    pub mod triangular_numbers;
}
pub mod search{
    pub mod search_traits;
    pub mod monotonic_oracle_search;
}
