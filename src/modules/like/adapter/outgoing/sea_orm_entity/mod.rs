pub mod post_likes;
