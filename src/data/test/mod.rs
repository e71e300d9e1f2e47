mod cooldown;
mod ticket;
