mod row;

pub(crate) use row::CommentTable;
