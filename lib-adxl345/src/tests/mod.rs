mod mock_bus;
