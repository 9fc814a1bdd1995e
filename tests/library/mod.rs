mod lifecycle_public_api_contract;
