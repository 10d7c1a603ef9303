mod properties;
mod walkthrough;
