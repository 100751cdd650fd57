mod statusline;

pub(crate) use statusline::build_statusline;
