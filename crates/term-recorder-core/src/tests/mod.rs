mod foreground;
mod keys;
