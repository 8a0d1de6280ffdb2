pub(crate) mod oracle;
pub(crate) mod random_graphs;
