mod builder_proptest;
mod markup_proptest;
