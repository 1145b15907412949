pub mod dispatch;
mod model;
mod review;
mod session;
mod shared;
mod speak;
mod study;
mod tools;
mod typo;
mod voices;
