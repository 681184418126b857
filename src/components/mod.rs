pub mod comment_list;
