pub(crate) mod epicycle_session;
