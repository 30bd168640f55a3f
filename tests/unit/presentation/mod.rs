mod test_instrument;
mod test_price;
