mod user;
mod user_patch;
