mod smartphone;

pub use smartphone::{
    ATTRIBUTE_NAMES, CLASS_NAME, smartphone, smartphone_extended, smartphone_queries,
};
