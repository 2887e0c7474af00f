mod address;
mod codec;
mod dispatch;
