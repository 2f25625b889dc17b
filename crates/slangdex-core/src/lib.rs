pub mod corpus;
pub mod glossary;
pub mod normalize;
