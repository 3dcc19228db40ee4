pub mod admission_posts;
