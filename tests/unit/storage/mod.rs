mod test_instruments;
